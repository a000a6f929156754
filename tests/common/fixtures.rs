/// The smallest useful presentation: one slide with one text item.
pub const SINGLE_SLIDE: &str = r#"<?xml version="1.0"?>
<presentation>
<showtitle>Demo</showtitle>
<slide>
<title>S1</title>
<item kind="text" level="1">Hello</item>
</slide>
</presentation>
"#;

/// A legacy file with a DOCTYPE, every level, an image and some bad items.
pub const MIXED: &str = r#"<?xml version="1.0"?>
<!DOCTYPE presentation SYSTEM "jabberpoint.dtd">
<presentation>
<showtitle>Mixed bag</showtitle>
<slide>
<title>Levels</title>
<item kind="text" level="0">Zero</item>
<item kind="text" level="1">One</item>
<item kind="text" level="2">Two</item>
<item kind="text" level="3">Three</item>
<item kind="text" level="4">Four</item>
<item kind="text" level="9">Deeper than styled</item>
</slide>
<slide>
<title>Pictures</title>
<item kind="image" level="1">logo.png</item>
<item kind="image" level="1">missing.png</item>
</slide>
<slide>
<title>Broken</title>
<item kind="text" level="x">bad level</item>
<item kind="sound" level="1">beep.wav</item>
<item kind="text" level="2">fine</item>
</slide>
</presentation>
"#;

pub const NO_SHOW_TITLE: &str = r#"<presentation>
<slide><title>Orphan</title></slide>
</presentation>"#;

pub const MALFORMED: &str = "<presentation><showtitle>Oops</presentation>";
