use super::*;

#[test]
fn minutes_parse_in_several_notations() {
    assert_eq!(parse_minutes("90"), Some(90));
    assert_eq!(parse_minutes("45m"), Some(45));
    assert_eq!(parse_minutes("1h30m"), Some(90));
    assert_eq!(parse_minutes("2h"), Some(120));
    assert_eq!(parse_minutes("1:05"), Some(65));
    assert_eq!(parse_minutes("1:75"), None);
    assert_eq!(parse_minutes("soon"), None);
}

#[test]
fn evaluation_request_validates_task_and_duration() {
    assert!(evaluation_request(" ", "30", "").is_err());
    assert!(evaluation_request("write report", "0", "").is_err());
    assert!(evaluation_request("write report", "later", "").is_err());

    let request = evaluation_request(" write report ", "1h", " done ").unwrap();
    assert_eq!(request.task, "write report");
    assert_eq!(request.minutes, 60);
    assert_eq!(request.outcome.as_deref(), Some("done"));
}
