use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpriteError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(
        SpriteError::unsupported("x")
            .to_string()
            .contains("unsupported:")
    );
    assert!(
        SpriteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    let io = SpriteError::from(std::io::Error::other("disk"));
    assert!(io.to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpriteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn early_eof_becomes_format_error() {
    let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
    assert!(matches!(
        SpriteError::from_read(eof, "frame count"),
        SpriteError::Format(msg) if msg.contains("frame count")
    ));

    let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    assert!(matches!(
        SpriteError::from_read(denied, "header"),
        SpriteError::Io(_)
    ));
}
