//! Reading and writing presentations in the slide-show XML format.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <presentation>
//! <showtitle>Title</showtitle>
//! <slide>
//! <title>Slide title</title>
//! <item kind="text" level="1">Some text</item>
//! <item kind="image" level="1">picture.png</item>
//! </slide>
//! </presentation>
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use self::error::{LoadDiagnostic, LoadError, SaveError};
pub use self::reader::XmlReader;
pub use self::writer::{XmlWriter, to_string, write_file};
