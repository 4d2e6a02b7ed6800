//! Filtering and Highlighting
//!
//! Case-insensitive substring filter over the todo list. Each match carries
//! the byte range of the hit in the original text so the view can wrap it
//! in `<mark>`.

use crate::models::Todo;

/// A todo that passed the filter, with the match range in `todo.text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredTodo {
    pub todo: Todo,
    pub start_match: usize,
    pub end_match: usize,
}

impl FilteredTodo {
    /// Split the text into (before, matched, after)
    pub fn segments(&self) -> (&str, &str, &str) {
        let text = self.todo.text.as_str();
        (
            &text[..self.start_match],
            &text[self.start_match..self.end_match],
            &text[self.end_match..],
        )
    }
}

/// Keep the todos whose text contains `word` (ignoring case), in order
pub fn filter_todos(todos: &[Todo], word: &str) -> Vec<FilteredTodo> {
    let needle = fold_case(word);
    todos
        .iter()
        .filter_map(|todo| {
            find_ignore_case(&todo.text, &needle).map(|(start_match, end_match)| FilteredTodo {
                todo: todo.clone(),
                start_match,
                end_match,
            })
        })
        .collect()
}

/// Per-char lowercase, the same folding `find_ignore_case` applies to the
/// text. Final sigma folds to 'σ' so "ΟΔΟΣ", "οδοσ" and "οδος" all match.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(fold_char).collect()
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Byte range in `text` of the first occurrence of `needle`, which must
/// already be passed through `fold_case`. Lowercasing can change byte lengths, so positions are found in
/// the folded text and mapped back to char boundaries of the original.
pub fn find_ignore_case(text: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }

    // (folded offset, original offset) at the start of every original char
    let mut folded = String::with_capacity(text.len());
    let mut bounds = Vec::with_capacity(text.len() + 1);
    for (orig, c) in text.char_indices() {
        bounds.push((folded.len(), orig));
        folded.extend(fold_char(c));
    }
    bounds.push((folded.len(), text.len()));

    let start = folded.find(needle)?;
    let end = start + needle.len();

    let orig_start = bounds
        .iter()
        .rev()
        .find(|(f, _)| *f <= start)
        .map(|(_, o)| *o)
        .unwrap_or(0);
    let orig_end = bounds
        .iter()
        .find(|(f, _)| *f >= end)
        .map(|(_, o)| *o)
        .unwrap_or(text.len());

    Some((orig_start, orig_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos(texts: &[&str]) -> Vec<Todo> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Todo::new(i as u32 + 1, t.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_word_keeps_everything() {
        let list = todos(&["Milk", "Eggs"]);
        let result = filter_todos(&list, "");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.start_match == 0 && f.end_match == 0));
        assert_eq!(result[0].segments(), ("", "", "Milk"));
    }

    #[test]
    fn test_filter_ignores_case_and_keeps_order() {
        let list = todos(&["Buy MILK", "Eggs", "milkshake", "Oat Milk"]);
        let result = filter_todos(&list, "mIlK");
        let ids: Vec<u32> = result.iter().map(|f| f.todo.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        assert_eq!(result[0].segments(), ("Buy ", "MILK", ""));
        assert_eq!(result[1].segments(), ("", "milk", "shake"));
        assert_eq!(result[2].segments(), ("Oat ", "Milk", ""));
    }

    #[test]
    fn test_first_occurrence_is_highlighted() {
        let list = todos(&["banana"]);
        let result = filter_todos(&list, "an");
        assert_eq!((result[0].start_match, result[0].end_match), (1, 3));
    }

    #[test]
    fn test_no_match() {
        let list = todos(&["Milk"]);
        assert!(filter_todos(&list, "bread").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let list = todos(&["Café au LAIT", "Ünïcode Äpfel"]);
        let result = filter_todos(&list, "lait");
        assert_eq!(result[0].segments(), ("Café au ", "LAIT", ""));

        let result = filter_todos(&list, "äpfel");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].segments(), ("Ünïcode ", "Äpfel", ""));
    }

    #[test]
    fn test_greek_final_sigma_matches() {
        let list = todos(&["ΟΔΟΣ", "Σάββατο"]);
        let result = filter_todos(&list, "ΟΔΟΣ");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].segments(), ("", "ΟΔΟΣ", ""));

        let result = filter_todos(&list, "οδος");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].todo.id, 1);
    }

    #[test]
    fn test_lowercase_expansion_stays_on_char_boundaries() {
        // 'İ' lowercases to two chars ("i" + combining dot)
        let (start, end) = find_ignore_case("xİy", "i").unwrap();
        assert_eq!(&"xİy"[start..end], "İ");

        let (start, end) = find_ignore_case("xİy", "y").unwrap();
        assert_eq!(&"xİy"[start..end], "y");
    }
}
