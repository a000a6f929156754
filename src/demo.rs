//! A built-in presentation, available without any file.

use lectern_document::{BitmapItem, Presentation, Slide};

pub const DEMO_TITLE: &str = "Lectern Demo";

/// Builds the demo presentation. No slide is selected.
pub fn demo_presentation() -> Presentation {
    let mut presentation = Presentation::new();
    populate(&mut presentation);
    presentation
}

/// Sets the demo title and appends the demo slides.
pub fn populate(presentation: &mut Presentation) {
    presentation.set_title(DEMO_TITLE);

    let mut intro = Slide::with_title("Welcome to Lectern");
    intro.append_text(1, "A small slide show engine");
    intro.append_text(2, "Copyright (c) the Lectern authors");
    intro.append_text(4, "Navigate with next and previous,");
    intro.append_text(4, "or jump straight to any slide.");
    intro.append_text(1, "");
    intro.append_text(1, "Open a presentation file to get started.");
    presentation.append(intro);

    let mut levels = Slide::with_title("Outline levels");
    levels.append_text(1, "Every item has a level");
    levels.append_text(1, "Level 1 is set in blue");
    levels.append_text(2, "Level 2 is indented further");
    levels.append_text(3, "Level 3 is smaller again");
    levels.append_text(4, "Level 4 is the deepest styled level");
    levels.append_text(
        1,
        "Long items wrap onto several lines when they do not fit in the width of the slide",
    );
    presentation.append(levels);

    let mut closing = Slide::with_title("Images");
    closing.append_text(1, "Image items name a picture to show.");
    closing.append_text(1, "Pictures that cannot be found show a notice instead:");
    closing.append(BitmapItem::unresolved(1, "lectern-logo.png"));
    closing.append_text(1, "End of the demo.");
    presentation.append(closing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_document::ItemKind;

    #[test]
    fn test_demo_is_three_unselected_slides() {
        let demo = demo_presentation();
        assert_eq!(demo.title(), DEMO_TITLE);
        assert_eq!(demo.len(), 3);
        assert_eq!(demo.current_index(), None);
    }

    #[test]
    fn test_last_slide_has_unresolved_image() {
        let demo = demo_presentation();
        let last = demo.slide(2).unwrap();
        let image = last
            .items()
            .iter()
            .find(|i| i.kind() == ItemKind::Image)
            .unwrap();
        assert_eq!(image.content(), "lectern-logo.png");
    }

    #[test]
    fn test_demo_is_deterministic() {
        let a = demo_presentation();
        let b = demo_presentation();
        assert_eq!(a.slides(), b.slides());
    }
}
