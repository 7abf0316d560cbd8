use serde::{Deserialize, Serialize};

/// One chapter of the audiobook, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub display_name: String,
    pub source: String,
}

impl Chapter {
    pub fn new(number: u32, display_name: &str, source: &str) -> Self {
        Self {
            number,
            display_name: display_name.to_string(),
            source: source.to_string(),
        }
    }

    pub fn title(&self) -> String {
        format!("Chapter {}", self.number)
    }
}

/// An item in the rendered chapter list.
///
/// `chapter_attr` is the raw `data-chapter` value; locked items are listed but
/// can't be selected and never take part in the active highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterListEntry {
    pub chapter_attr: String,
    pub label: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(skip)]
    pub active: bool,
}

impl ChapterListEntry {
    pub fn unlocked(chapter: &Chapter) -> Self {
        Self {
            chapter_attr: chapter.number.to_string(),
            label: chapter.display_name.clone(),
            locked: false,
            active: false,
        }
    }

    pub fn locked(number: u32, label: &str) -> Self {
        Self {
            chapter_attr: number.to_string(),
            label: label.to_string(),
            locked: true,
            active: false,
        }
    }
}

const CHAPTER_TABLE: [(u32, &str, &str); 6] = [
    (1, "The Beginning", "audio/chapter-01.mp3"),
    (2, "First Encounter", "audio/chapter-02.mp3"),
    (3, "The Revelation", "audio/chapter-03.mp3"),
    (4, "Descent", "audio/chapter-04.mp3"),
    (5, "The Choice", "audio/chapter-05.mp3"),
    (6, "Awakening", "audio/chapter-06.mp3"),
];

/// The published chapters. Append to `CHAPTER_TABLE` to add more.
pub fn default_chapters() -> Vec<Chapter> {
    CHAPTER_TABLE
        .iter()
        .map(|(number, name, source)| Chapter::new(*number, name, source))
        .collect()
}

/// Every published chapter followed by the not-yet-released teasers.
pub fn default_chapter_list(chapters: &[Chapter]) -> Vec<ChapterListEntry> {
    let mut entries: Vec<ChapterListEntry> =
        chapters.iter().map(ChapterListEntry::unlocked).collect();
    let next = chapters.last().map(|c| c.number + 1).unwrap_or(1);
    entries.push(ChapterListEntry::locked(next, "Coming soon"));
    entries.push(ChapterListEntry::locked(next + 1, "Coming soon"));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_table_is_ordered_and_numbered_from_one() {
        let chapters = default_chapters();
        assert_eq!(chapters.len(), 6);
        for (idx, chapter) in chapters.iter().enumerate() {
            assert_eq!(chapter.number as usize, idx + 1);
            assert_eq!(chapter.source, format!("audio/chapter-0{}.mp3", idx + 1));
        }
        assert_eq!(chapters[5].display_name, "Awakening");
    }

    #[test]
    fn default_list_appends_locked_teasers() {
        let chapters = default_chapters();
        let list = default_chapter_list(&chapters);
        assert_eq!(list.len(), 8);
        assert!(list[..6].iter().all(|e| !e.locked));
        assert!(list[6..].iter().all(|e| e.locked));
        assert_eq!(list[6].chapter_attr, "7");
        assert!(list.iter().all(|e| !e.active));
    }
}
