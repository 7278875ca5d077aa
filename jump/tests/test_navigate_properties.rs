// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the navigator that must hold for any text and caret. Texts and carets
//! are generated from a fixed seed so failures are reproducible.

use r3bl_jump::{ByteIndex, Direction, InMemoryDocument, MotionArgs, NavigationRequest,
                SearchPattern, assert_eq2, byte_index, col, collect_matches, find_headings,
                find_links, jump_to_next_heading, jump_to_previous_heading, navigate_offset,
                pos, row};
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

const SEED: u64 = 0x00C0_FFEE;
const ITERATIONS: usize = 200;

/// Pieces that random documents are glued together from. Multi-byte chars are included
/// so carets land on non ASCII boundaries too.
const PIECES: &[&str] = &["ab", "a", "b", " ", "x", "\n", "é", "😀"];

fn random_text(rng: &mut StdRng) -> String {
    let piece_count = rng.random_range(0..40);
    (0..piece_count)
        .map(|_| PIECES[rng.random_range(0..PIECES.len())])
        .collect()
}

/// A random `char` boundary in `text`, including the end of the text.
fn random_cursor(rng: &mut StdRng, text: &str) -> ByteIndex {
    let boundaries = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect::<Vec<_>>();
    byte_index(boundaries[rng.random_range(0..boundaries.len())])
}

fn nav(
    text: &str,
    pattern: &SearchPattern,
    cursor: ByteIndex,
    repeat: usize,
    direction: Direction,
) -> ByteIndex {
    navigate_offset(
        &NavigationRequest::new(text, pattern, cursor)
            .repeat(repeat)
            .direction(direction),
    )
}

#[test]
fn test_empty_match_set_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let pattern = SearchPattern::try_new("zzz").unwrap();
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        let cursor = random_cursor(&mut rng, &text);
        let repeat = rng.random_range(0..10);
        for direction in Direction::iter() {
            assert_eq2!(nav(&text, &pattern, cursor, repeat, direction), cursor);
        }
    }
}

#[test]
fn test_wraparound_closure() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let pattern = SearchPattern::try_new("ab").unwrap();
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        let cursor = random_cursor(&mut rng, &text);
        let match_count = collect_matches(&text, &pattern, None).len();
        if match_count == 0 {
            continue;
        }
        let repeat = rng.random_range(1..10);
        for direction in Direction::iter() {
            assert_eq2!(
                nav(&text, &pattern, cursor, repeat, direction),
                nav(&text, &pattern, cursor, repeat + match_count, direction),
                "text: {text:?}, cursor: {cursor:?}, repeat: {repeat}"
            );
        }
    }
}

#[test]
fn test_result_is_always_a_match_start() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let pattern = SearchPattern::try_new("ab").unwrap();
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        let cursor = random_cursor(&mut rng, &text);
        let starts = collect_matches(&text, &pattern, None)
            .into_iter()
            .map(|it| it.start)
            .collect::<Vec<_>>();
        if starts.is_empty() {
            continue;
        }
        for direction in Direction::iter() {
            let it = nav(&text, &pattern, cursor, rng.random_range(0..10), direction);
            assert!(starts.contains(&it), "{it:?} is not in {starts:?}");
        }
    }
}

#[test]
fn test_next_then_previous_returns_to_current_match() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let pattern = SearchPattern::try_new("ab").unwrap();
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        let matches = collect_matches(&text, &pattern, None);
        if matches.len() < 2 {
            continue;
        }
        let current = &matches[rng.random_range(0..matches.len())];
        let cursor = byte_index(rng.random_range(current.start.as_usize()..*current.end()));

        let next = nav(&text, &pattern, cursor, 1, Direction::Next);
        let back = nav(&text, &pattern, next, 1, Direction::Previous);
        assert_eq2!(back, current.start, "text: {text:?}, cursor: {cursor:?}");
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let pattern = SearchPattern::try_new("a|b").unwrap();
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        let cursor = random_cursor(&mut rng, &text);
        let repeat = rng.random_range(0..10);
        for direction in Direction::iter() {
            assert_eq2!(
                nav(&text, &pattern, cursor, repeat, direction),
                nav(&text, &pattern, cursor, repeat, direction)
            );
        }
    }
}

#[test]
fn test_wiki_link_escaping() {
    assert!(find_links(r"\[[Some note]]").is_empty());
}

#[test]
fn test_markdown_link_w_escaped_brackets() {
    let text = r"[a \[b\] c](http://x)";
    let it = find_links(text);
    assert_eq2!(it.len(), 1);
    assert_eq2!(it[0].text, text);
}

#[test]
fn test_precedence_composite() {
    let it = find_links("[[2]](https://example.com)")
        .into_iter()
        .map(|it| it.text)
        .collect::<Vec<_>>();
    assert_eq2!(it, vec!["[[2]]", "https://example.com)"]);
}

#[test]
fn test_heading_navigation_excludes_codeblocks() {
    let doc = InMemoryDocument::new(
        ["Intro", "```python", "# not a heading", "```", "", "# Real heading"].join("\n"),
    );
    for repeat in 1..4 {
        let it = jump_to_next_heading(&doc, pos(row(0), col(0)), MotionArgs { repeat });
        assert_eq2!(it, pos(row(5), col(0)));
    }
}

/// Enough filler rows to make a document of well over a megabyte.
const LARGE_DOC_FILLER_ROWS: usize = 30_000;

fn filler_rows() -> impl Iterator<Item = String> {
    (0..LARGE_DOC_FILLER_ROWS)
        .map(|it| format!("line {it} lorem ipsum dolor sit amet consectetur"))
}

fn titles(text: &str) -> Vec<String> {
    find_headings(text).into_iter().map(|it| it.title).collect()
}

#[test]
fn test_large_document_excludes_codeblocks_at_both_ends() {
    let head = ["```python", "# not a heading", "```", "# Real"].map(String::from);
    let tail = ["```sh", "# inside late fence", "```", "# Tail"].map(String::from);
    let text = head
        .into_iter()
        .chain(filler_rows())
        .chain(tail)
        .collect::<Vec<_>>()
        .join("\n");
    assert!(text.len() > 1_000_000);
    assert_eq2!(titles(&text), vec!["Real", "Tail"]);

    let doc = InMemoryDocument::new(text);
    let tail_row = row(4 + LARGE_DOC_FILLER_ROWS + 3);
    let top = pos(row(0), col(0));
    assert_eq2!(
        jump_to_next_heading(&doc, top, MotionArgs::default()),
        pos(row(3), col(0))
    );
    assert_eq2!(
        jump_to_next_heading(&doc, top, MotionArgs { repeat: 2 }),
        pos(tail_row, col(0))
    );
    assert_eq2!(
        jump_to_previous_heading(&doc, top, MotionArgs::default()),
        pos(tail_row, col(0))
    );
}

#[test]
fn test_large_unclosed_codeblock_runs_to_the_end() {
    let text = ["# Top", "```"]
        .map(String::from)
        .into_iter()
        .chain(filler_rows())
        .chain(std::iter::once("# in code".to_string()))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq2!(titles(&text), vec!["Top"]);

    let doc = InMemoryDocument::new(text);
    let top = pos(row(0), col(0));
    assert_eq2!(jump_to_next_heading(&doc, top, MotionArgs::default()), top);
}

#[test]
fn test_multi_line_non_match() {
    let split_links = [
        "[[\nnote]]",
        "[[note\n]]",
        "[text\n](http://x.y)",
        "http:\n//x.y",
    ];
    for text in split_links {
        let it = find_links(text);
        assert!(
            it.iter().all(|link| !link.text.contains('\n')),
            "{text:?} matched {it:?}"
        );
        assert!(it.iter().all(|link| !link.text.starts_with('[')), "{text:?}");
    }

    let doc = InMemoryDocument::new("#\n heading\n##\n");
    let cursor = pos(row(1), col(3));
    assert_eq2!(jump_to_next_heading(&doc, cursor, MotionArgs::default()), cursor);
}
