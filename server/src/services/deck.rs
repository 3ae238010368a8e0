//! Deck service — slide-array CRUD and navigation.
//!
//! DESIGN
//! ======
//! A deck is a plain ordered array of slides plus a current index. All
//! operations are synchronous functions over that array so they can be
//! tested without the router; handlers own locking and deck lookup. The
//! canvas's mutation sink lands here through [`Deck::update_html`].

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use canvas::slide::Slide;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("deck not found: {0}")]
    NotFound(Uuid),
    #[error("slide not found: {0}")]
    SlideNotFound(String),
    #[error("a deck must keep at least one slide")]
    LastSlide,
}

/// An editable slide deck.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub id: Uuid,
    pub topic: String,
    pub slides: Vec<Slide>,
    /// Index of the slide mounted in the editor and shown in playback.
    pub current: usize,
}

impl Deck {
    /// Build a deck from generated slides. An empty list falls back to the
    /// built-in welcome slide so the editor always has something to mount.
    #[must_use]
    pub fn new(topic: &str, slides: Vec<Slide>) -> Self {
        let slides = if slides.is_empty() { vec![welcome_slide()] } else { slides };
        Self { id: Uuid::new_v4(), topic: topic.to_string(), slides, current: 0 }
    }

    /// The slide the editor currently has mounted.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Insert a blank slide after the current one and select it.
    pub fn add_blank_slide(&mut self) -> &Slide {
        let slide = blank_slide();
        let at = (self.current + 1).min(self.slides.len());
        self.slides.insert(at, slide);
        self.current = at;
        &self.slides[at]
    }

    /// Remove a slide by id. Refused when it is the last remaining slide.
    /// The current index shifts down when it sits at or after the removed
    /// position, so the editor never points past the end.
    pub fn remove_slide(&mut self, slide_id: &str) -> Result<Slide, DeckError> {
        if self.slides.len() <= 1 {
            return Err(DeckError::LastSlide);
        }
        let index = self.position(slide_id)?;
        let removed = self.slides.remove(index);
        if self.current >= index && self.current > 0 {
            self.current -= 1;
        }
        Ok(removed)
    }

    /// The mutation sink's landing point: store the canvas's serialized
    /// markup as the slide's new content.
    pub fn update_html(&mut self, slide_id: &str, html: String) -> Result<(), DeckError> {
        let index = self.position(slide_id)?;
        self.slides[index].html_content = html;
        Ok(())
    }

    pub fn update_notes(&mut self, slide_id: &str, notes: String) -> Result<(), DeckError> {
        let index = self.position(slide_id)?;
        self.slides[index].notes = Some(notes);
        Ok(())
    }

    // ── Navigation (editor selection and playback) ──────────────

    /// Jump to a slide, clamped to the deck bounds.
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.slides.len().saturating_sub(1));
    }

    fn position(&self, slide_id: &str) -> Result<usize, DeckError> {
        self.slides
            .iter()
            .position(|s| s.id == slide_id)
            .ok_or_else(|| DeckError::SlideNotFound(slide_id.to_string()))
    }
}

/// The slide shown before any generation has run.
#[must_use]
pub fn welcome_slide() -> Slide {
    Slide {
        id: "init-1".into(),
        html_content: concat!(
            r#"<div style="width: 100%; height: 100%; display: flex; flex-direction: column; "#,
            r#"align-items: center; justify-content: center; "#,
            r#"background: linear-gradient(135deg, #f3f4f6 0%, #e5e7eb 100%);">"#,
            r#"<h1 style="font-size: 3rem; font-weight: bold; color: #1f2937; margin-bottom: 1rem;">"#,
            "Welcome to Deckboard</h1>",
            r#"<p style="font-size: 1.5rem; color: #4b5563;">Enter a topic to generate your deck.</p>"#,
            "</div>",
        )
        .into(),
        notes: Some("Welcome slide".into()),
    }
}

/// Blank slide inserted by the add-slide action.
fn blank_slide() -> Slide {
    Slide {
        id: format!("slide-{}", Uuid::new_v4()),
        html_content: concat!(
            r#"<div style="width: 100%; height: 100%; background: #ffffff; padding: 40px;">"#,
            "<h2>New Slide</h2><p>Click to edit...</p></div>",
        )
        .into(),
        notes: None,
    }
}
