use tsk::error::{exit_codes, Error};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::EmptyDescription;
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::TaskNotFound(7);
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::UnknownBackend("redis".to_string());
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let op = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn messages_name_the_offending_input() {
    assert_eq!(Error::TaskNotFound(42).to_string(), "task 42 not found");
    assert!(Error::UnknownBackend("redis".to_string())
        .to_string()
        .contains("'redis'"));
}
