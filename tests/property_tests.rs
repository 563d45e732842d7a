use jump_hints::segment::{is_word_char, segment};
use jump_hints::{find, sneak};
use proptest::prelude::*;

// Strategy for generating lines with frequent collisions and some edge cases
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Empty line
        Just("".to_string()),
        // Small alphabet, lots of repeats
        "[abc _.]{0,40}",
        // Code-like text
        "[a-zA-Z0-9_ (){};,.=]{0,80}",
        // Unicode letters and separators
        "[a-zäöü\u{4E00}-\u{4E0F} \u{00A0}-]{0,40}",
        // Separators only
        "[ .,;()-]{0,10}",
    ]
}

// A line together with a cursor anywhere in 0..=len
fn line_and_cursor() -> impl Strategy<Value = (String, usize)> {
    line_strategy().prop_flat_map(|line| {
        let len = line.chars().count();
        (Just(line), 0..=len)
    })
}

/// Char offsets of the word containing `cursor` when the cursor splits it
/// into two non-empty halves.
fn cursor_word(chars: &[char], cursor: usize) -> Option<std::ops::Range<usize>> {
    let inside = |i: usize| chars.get(i).copied().is_some_and(is_word_char);
    if cursor == 0 || !inside(cursor - 1) || !inside(cursor) || !inside(cursor + 1) {
        return None;
    }
    let mut start = cursor;
    while start > 0 && inside(start - 1) {
        start -= 1;
    }
    let mut end = cursor;
    while inside(end) {
        end += 1;
    }
    Some(start..end)
}

proptest! {
    #[test]
    fn forward_targets_lie_after_cursor((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        for entries in [
            find::highlight_forward(&line, cursor).unwrap(),
            sneak::highlight_forward(&line, cursor).unwrap(),
        ] {
            for e in &entries {
                prop_assert!(e.position > cursor);
                prop_assert!(e.position < chars.len());
                prop_assert!(is_word_char(chars[e.position]));
                prop_assert!(e.min_times_to_reach >= 1);
            }
            // Left to right, one entry per word
            prop_assert!(entries.windows(2).all(|w| w[0].position < w[1].position));
        }
    }

    #[test]
    fn backward_targets_lie_before_cursor((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        for entries in [
            find::highlight_backward(&line, cursor).unwrap(),
            sneak::highlight_backward(&line, cursor).unwrap(),
        ] {
            for e in &entries {
                prop_assert!(e.position < cursor);
                prop_assert!(is_word_char(chars[e.position]));
                prop_assert!(e.min_times_to_reach >= 1);
            }
            // Nearest word first
            prop_assert!(entries.windows(2).all(|w| w[0].position > w[1].position));
        }
    }

    #[test]
    fn sneak_reach_is_one_or_two((line, cursor) in line_and_cursor()) {
        let forward = sneak::highlight_forward(&line, cursor).unwrap();
        let backward = sneak::highlight_backward(&line, cursor).unwrap();
        for e in forward.iter().chain(&backward) {
            prop_assert!(e.min_times_to_reach == 1 || e.min_times_to_reach == 2);
        }
    }

    #[test]
    fn cursor_word_is_never_a_target((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        if let Some(word) = cursor_word(&chars, cursor) {
            let all = [
                find::highlight_forward(&line, cursor).unwrap(),
                find::highlight_backward(&line, cursor).unwrap(),
                sneak::highlight_forward(&line, cursor).unwrap(),
                sneak::highlight_backward(&line, cursor).unwrap(),
            ];
            for e in all.iter().flatten() {
                prop_assert!(!word.contains(&e.position));
            }
        }
    }

    #[test]
    fn unique_leading_char_wins((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        let seg = segment(&chars, cursor);
        let entries = find::highlight_forward(&line, cursor).unwrap();
        let skip = usize::from(seg.cursor_in_word);

        for token in seg.after.iter().skip(skip) {
            let first = token.word[0];
            let count = chars[cursor + 1..].iter().filter(|&&c| c == first).count();
            if count == 1 {
                prop_assert!(entries.iter().any(|e| e.position == token.start && e.min_times_to_reach == 1));
            }
        }
    }

    #[test]
    fn unique_leading_pair_wins((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        let seg = segment(&chars, cursor);
        let entries = sneak::highlight_forward(&line, cursor).unwrap();
        let skip = usize::from(seg.cursor_in_word);

        for token in seg.after.iter().skip(skip).filter(|t| t.word.len() >= 2) {
            let pair = [token.word[0], token.word[1]];
            let count = chars[cursor..].windows(2).filter(|w| *w == pair).count();
            if count == 1 {
                prop_assert!(entries.iter().any(|e| e.position == token.start && e.min_times_to_reach == 1));
            }
        }
    }

    #[test]
    fn unique_leading_char_wins_backward((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        let seg = segment(&chars, cursor);
        let entries = find::highlight_backward(&line, cursor).unwrap();
        let skip = usize::from(seg.cursor_in_word);

        for token in seg.before.iter().rev().skip(skip) {
            let first = token.word[0];
            let count = chars[..cursor].iter().filter(|&&c| c == first).count();
            if count == 1 {
                prop_assert!(entries.iter().any(|e| e.position == token.start && e.min_times_to_reach == 1));
            }
        }
    }

    #[test]
    fn unique_pair_wins_backward((line, cursor) in line_and_cursor()) {
        let chars: Vec<char> = line.chars().collect();
        let seg = segment(&chars, cursor);
        let entries = sneak::highlight_backward(&line, cursor).unwrap();
        let skip = usize::from(seg.cursor_in_word);
        let occurrences = |pair: &[char]| chars[..cursor].windows(2).filter(|w| *w == pair).count();

        for token in seg.before.iter().rev().skip(skip).filter(|t| t.word.len() >= 2) {
            let entry = entries
                .iter()
                .find(|e| (token.start..token.start + token.word.len()).contains(&e.position));

            // Any unique pair makes the word reachable in one jump
            if token.word.windows(2).any(|pair| occurrences(pair) == 1) {
                prop_assert!(entry.is_some_and(|e| e.min_times_to_reach == 1));
            }

            // Scanning from the cursor side, a unique last pair is taken first
            let last = token.word.len() - 2;
            if occurrences(&token.word[last..]) == 1 {
                prop_assert!(entry.is_some_and(|e| e.position == token.start + last));
            }
        }
    }

    #[test]
    fn queries_are_idempotent((line, cursor) in line_and_cursor()) {
        prop_assert_eq!(find::highlight_forward(&line, cursor), find::highlight_forward(&line, cursor));
        prop_assert_eq!(find::highlight_backward(&line, cursor), find::highlight_backward(&line, cursor));
        prop_assert_eq!(sneak::highlight_forward(&line, cursor), sneak::highlight_forward(&line, cursor));
        prop_assert_eq!(sneak::highlight_backward(&line, cursor), sneak::highlight_backward(&line, cursor));
    }

    #[test]
    fn cursor_past_end_never_panics(line in line_strategy(), extra in 1usize..10) {
        let len = line.chars().count();
        prop_assert!(find::highlight_forward(&line, len + extra).is_err());
        prop_assert!(sneak::highlight_backward(&line, len + extra).is_err());
    }
}

// Specific edge case tests
#[test]
fn every_cursor_of_a_real_line() {
    let line = "    let (a, b) = self.cursor.split_at(offset + 1);";
    let len = line.chars().count();
    for cursor in 0..=len {
        assert!(find::highlight_forward(line, cursor).is_ok());
        assert!(find::highlight_backward(line, cursor).is_ok());
        assert!(sneak::highlight_forward(line, cursor).is_ok());
        assert!(sneak::highlight_backward(line, cursor).is_ok());
    }
}
