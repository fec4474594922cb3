use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnvilError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AnvilError::render("x").to_string().contains("render error:"));
    assert!(AnvilError::encode("x").to_string().contains("encode error:"));
    assert!(AnvilError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnvilError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert_with_question_mark() {
    fn fails() -> AnvilResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, AnvilError::Io(_)));
    assert!(err.to_string().contains("gone"));
}
