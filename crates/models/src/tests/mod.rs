
#[test]
fn names_only_need_to_be_present() {
    use crate::errors::ModelError;
    assert!(matches!(crate::validate_name(""), Err(ModelError::Validation(_))));
    assert!(crate::validate_name("   ").is_ok());
    assert!(crate::validate_name("\t").is_ok());
    assert!(crate::validate_name("Ada").is_ok());
}
