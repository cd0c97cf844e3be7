use crate::constants::HIGHLIGHT_SECTIONS;

/// Intersection change for one named section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionHit<'a> {
    pub id: &'a str,
    pub is_intersecting: bool,
}

/// Tracks which observed sections are in view and which navigation entry is
/// active.
///
/// Sections are registered in document order. After every batch that touches
/// a known section, the topmost section currently in view becomes active, so
/// the outcome does not depend on the order of entries inside a batch. When no
/// section is left in view the last active entry stays lit.
#[derive(Clone, Debug)]
pub struct SectionHighlighter {
    sections: Vec<String>,
    in_view: Vec<bool>,
    active: Option<usize>,
}

impl Default for SectionHighlighter {
    fn default() -> Self {
        Self::new(HIGHLIGHT_SECTIONS)
    }
}

impl SectionHighlighter {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let in_view = vec![false; sections.len()];
        Self {
            sections,
            in_view,
            active: None,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    /// Apply one observer callback batch. Returns the section whose link must
    /// be marked active (all others cleared), or `None` when the batch
    /// touched no known section or left nothing in view.
    pub fn apply_batch(&mut self, hits: &[SectionHit<'_>]) -> Option<&str> {
        let mut touched = false;
        for hit in hits {
            let Some(i) = self.position(hit.id) else {
                continue;
            };
            self.in_view[i] = hit.is_intersecting;
            touched = true;
        }
        if !touched {
            return None;
        }
        let winner = self.in_view.iter().position(|&v| v)?;
        self.active = Some(winner);
        Some(self.sections[winner].as_str())
    }

    /// Navigation `href` matching a section id.
    pub fn href_for(id: &str) -> String {
        format!("#{id}")
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }
}
