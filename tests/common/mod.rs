#![allow(dead_code)]

pub mod fixtures;

use lectern::{InMemoryResourceProvider, LoadDiagnostic, Presentation, Source, load_presentation};
use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `xml` to `dir/name` and loads it through the command surface.
pub fn load_xml(
    dir: &Path,
    name: &str,
    xml: &str,
    resolver: &InMemoryResourceProvider,
) -> Result<(Presentation, Vec<LoadDiagnostic>), Box<dyn std::error::Error>> {
    let path = dir.join(name);
    std::fs::write(&path, xml)?;
    let mut presentation = Presentation::new();
    let diagnostics = load_presentation(&mut presentation, &Source::File(path), resolver)?;
    Ok((presentation, diagnostics))
}

/// A solid PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 128, 255, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .expect("encode png");
    buffer
}

/// Shared log of (observer name, notified index, notified slide title).
pub type EventLog = Rc<RefCell<Vec<(&'static str, Option<usize>, Option<String>)>>>;

/// Observer that records the index and slide title it was notified with.
pub struct RecordingObserver {
    pub name: &'static str,
    pub events: EventLog,
}

impl RecordingObserver {
    pub fn new(name: &'static str, events: EventLog) -> Self {
        Self { name, events }
    }
}

impl lectern::SlideObserver for RecordingObserver {
    fn update(&self, presentation: &Presentation, current: Option<&lectern::Slide>) {
        self.events.borrow_mut().push((
            self.name,
            presentation.current_index(),
            current.map(|s| s.title().to_string()),
        ));
    }
}
