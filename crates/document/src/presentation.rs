//! The slide show and its navigation state.

use crate::slide::Slide;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Slide index {index} is out of range (presentation has {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

/// Receives a callback whenever the current slide changes.
///
/// `current` is `None` when no slide is selected.
pub trait SlideObserver {
    fn update(&self, presentation: &Presentation, current: Option<&Slide>);
}

/// A titled sequence of slides with a current-slide cursor.
///
/// Every change to the cursor, including setting it to its present value,
/// notifies all observers in registration order.
#[derive(Default)]
pub struct Presentation {
    title: String,
    slides: Vec<Slide>,
    current: Option<usize>,
    observers: Vec<Rc<dyn SlideObserver>>,
}

impl std::fmt::Debug for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("title", &self.title)
            .field("slides", &self.slides)
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Appends a slide. Does not move the cursor or notify.
    pub fn append(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.current.and_then(|i| self.slides.get(i))
    }

    /// Moves the cursor to `index` and notifies observers.
    ///
    /// An index past the end is rejected and leaves the cursor untouched.
    pub fn set_current_index(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.slides.len() {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.select(Some(index));
        Ok(())
    }

    /// Clears the selection and notifies observers.
    pub fn deselect(&mut self) {
        self.select(None);
    }

    /// Advances to the next slide. A no-op on the last slide.
    ///
    /// With no selection this moves to the first slide, if there is one.
    /// Returns whether the cursor moved.
    pub fn next_slide(&mut self) -> bool {
        let next = self.current.map_or(0, |i| i + 1);
        if next < self.slides.len() {
            self.select(Some(next));
            return true;
        }
        false
    }

    /// Steps back one slide. A no-op on the first slide or with no selection.
    pub fn prev_slide(&mut self) -> bool {
        if let Some(i) = self.current
            && i > 0
        {
            self.select(Some(i - 1));
            return true;
        }
        false
    }

    /// Removes every slide and the title, clears the selection and notifies.
    pub fn clear(&mut self) {
        self.title.clear();
        self.slides.clear();
        self.select(None);
    }

    pub fn add_observer(&mut self, observer: Rc<dyn SlideObserver>) {
        self.observers.push(observer);
    }

    /// Removes `observer` by identity. Returns whether it was registered.
    pub fn remove_observer(&mut self, observer: &Rc<dyn SlideObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Terminates the process with `code`.
    pub fn exit(&self, code: i32) -> ! {
        log::info!("Exiting presentation '{}' with code {}", self.title, code);
        std::process::exit(code)
    }

    fn select(&mut self, index: Option<usize>) {
        self.current = index;
        log::debug!("Current slide: {:?} of {}", index, self.slides.len());
        let current = self.current_slide();
        for observer in &self.observers {
            observer.update(self, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Log {
        name: &'static str,
        seen: Rc<RefCell<Vec<(&'static str, Option<usize>, Option<String>)>>>,
    }

    impl SlideObserver for Log {
        fn update(&self, presentation: &Presentation, current: Option<&Slide>) {
            self.seen.borrow_mut().push((
                self.name,
                presentation.current_index(),
                current.map(|s| s.title().to_string()),
            ));
        }
    }

    fn three_slides() -> Presentation {
        let mut p = Presentation::new();
        p.set_title("Deck");
        for title in ["A", "B", "C"] {
            p.append(Slide::with_title(title));
        }
        p
    }

    #[test]
    fn test_new_presentation_has_no_selection() {
        let p = Presentation::new();
        assert!(p.is_empty());
        assert_eq!(p.current_index(), None);
        assert!(p.current_slide().is_none());
    }

    #[test]
    fn test_navigation_saturates_at_both_ends() {
        let mut p = three_slides();
        p.set_current_index(2).unwrap();
        assert!(!p.next_slide());
        assert_eq!(p.current_index(), Some(2));

        p.set_current_index(0).unwrap();
        assert!(!p.prev_slide());
        assert_eq!(p.current_index(), Some(0));

        assert!(p.next_slide());
        assert_eq!(p.current_slide().unwrap().title(), "B");
    }

    #[test]
    fn test_next_from_no_selection_goes_to_first() {
        let mut p = three_slides();
        p.next_slide();
        assert_eq!(p.current_index(), Some(0));

        let mut empty = Presentation::new();
        empty.next_slide();
        assert_eq!(empty.current_index(), None);
        empty.prev_slide();
        assert_eq!(empty.current_index(), None);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut p = three_slides();
        p.set_current_index(1).unwrap();
        assert_eq!(
            p.set_current_index(3),
            Err(NavigationError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(p.current_index(), Some(1));
    }

    #[test]
    fn test_observers_notified_in_order_on_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = three_slides();
        p.add_observer(Rc::new(Log {
            name: "first",
            seen: seen.clone(),
        }));
        p.add_observer(Rc::new(Log {
            name: "second",
            seen: seen.clone(),
        }));

        p.set_current_index(1).unwrap();
        p.set_current_index(1).unwrap();
        p.deselect();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], ("first", Some(1), Some("B".to_string())));
        assert_eq!(seen[1], ("second", Some(1), Some("B".to_string())));
        assert_eq!(seen[5], ("second", None, None));
    }

    #[test]
    fn test_saturated_navigation_does_not_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = three_slides();
        p.set_current_index(0).unwrap();
        p.add_observer(Rc::new(Log {
            name: "o",
            seen: seen.clone(),
        }));
        p.prev_slide();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_observer_by_identity() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer: Rc<dyn SlideObserver> = Rc::new(Log {
            name: "o",
            seen: seen.clone(),
        });
        let mut p = three_slides();
        p.add_observer(observer.clone());
        assert!(p.remove_observer(&observer));
        assert!(!p.remove_observer(&observer));

        p.set_current_index(0).unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_clear_resets_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = three_slides();
        p.set_current_index(2).unwrap();
        p.add_observer(Rc::new(Log {
            name: "o",
            seen: seen.clone(),
        }));

        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.title(), "");
        assert_eq!(p.current_index(), None);
        assert_eq!(seen.borrow().as_slice(), &[("o", None, None)]);
    }
}
