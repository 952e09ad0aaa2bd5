use academy_core::errors::{ScheduleError, ScheduleResult};
use std::error::Error;

#[test]
fn test_schedule_error_display() {
    let validation = ScheduleError::Validation("text is too long".to_string());
    let unavailable = ScheduleError::ModelUnavailable("no API key".to_string());
    let response = ScheduleError::ModelResponse("no JSON array".to_string());
    let internal = ScheduleError::Internal(eyre::eyre!("task panicked"));

    assert_eq!(validation.to_string(), "Validation error: text is too long");
    assert_eq!(
        unavailable.to_string(),
        "Schedule model unavailable: no API key"
    );
    assert_eq!(response.to_string(), "Invalid model response: no JSON array");
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_eyre_conversion() {
    fn fails() -> ScheduleResult<()> {
        Err::<(), _>(eyre::eyre!("boom"))?;
        Ok(())
    }

    let err = fails().unwrap_err();

    assert!(matches!(err, ScheduleError::Internal(_)));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn test_string_variants_have_no_source() {
    let err = ScheduleError::Validation("bad".to_string());

    assert!(err.source().is_none());
}

#[test]
fn test_schedule_result() {
    let result: ScheduleResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: ScheduleResult<i32> = Err(ScheduleError::Validation("empty".to_string()));
    assert!(result.is_err());
}
