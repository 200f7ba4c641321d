//! Render targets for the typewriter

use std::sync::{Arc, Mutex};

/// Something that displays a single line of text
///
/// Each step of the cycler overwrites the whole displayed text.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

impl<S: TextSink + ?Sized> TextSink for Box<S> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// Records every frame
impl TextSink for Vec<String> {
    fn set_text(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Displayed text shared between the driver task and observers
///
/// Clones refer to the same text.
#[derive(Clone, Debug, Default)]
pub struct SharedText {
    inner: Arc<Mutex<String>>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the displayed text
    pub fn get(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TextSink for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut current = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        current.clear();
        current.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_overwrites() {
        let mut text = String::from("stale");
        text.set_text("fresh");
        assert_eq!(text, "fresh");
    }

    #[test]
    fn test_shared_text_clones_observe_writes() {
        let observer = SharedText::new();
        let mut writer = observer.clone();

        writer.set_text("Full");
        assert_eq!(observer.get(), "Full");

        writer.set_text("");
        assert_eq!(observer.get(), "");
    }

    #[test]
    fn test_boxed_sink() {
        let mut frames: Vec<String> = Vec::new();
        {
            let mut sink: Box<dyn TextSink + '_> = Box::new(&mut frames);
            sink.set_text("a");
            sink.set_text("ab");
        }
        assert_eq!(frames, vec!["a", "ab"]);
    }
}
