use prosecap::segments::{ClassifiedSegment, classify_all};
use prosecap::{RawSegment, reconstruct_transcript};

const RETRY: &str = "No results found Tap to retry";

#[test]
fn joins_fragments_into_a_sentence() {
    let segments = [RawSegment::caption("hello"), RawSegment::caption("world.")];
    let result = reconstruct_transcript(&segments, "T");
    assert_eq!(result.body, "# T\n\nHello world.");
}

#[test]
fn first_three_headers_are_page_furniture() {
    let segments = [
        RawSegment::header("Intro"),
        RawSegment::header("Intro"),
        RawSegment::header("Intro"),
        RawSegment::header("Chapter 1"),
        RawSegment::caption("it starts."),
    ];
    let result = reconstruct_transcript(&segments, "T");

    assert_eq!(result.body, "# T\n\n###Chapter 1\n\nit starts.");
    assert!(!result.body.contains("Intro"));
}

#[test]
fn chapter_header_keeps_its_blank_lines_between_content() {
    let segments = [
        RawSegment::header("a"),
        RawSegment::header("b"),
        RawSegment::header("c"),
        RawSegment::caption("before."),
        RawSegment::header("Chapter 1"),
        RawSegment::caption("after."),
    ];
    let result = reconstruct_transcript(&segments, "T");
    assert!(result.body.contains("\n\n###Chapter 1\n\n"));
}

#[test]
fn blank_only_transcript_trims_to_the_heading() {
    let segments = [RawSegment::caption(""), RawSegment::caption("")];
    let result = reconstruct_transcript(&segments, "X");
    assert_eq!(result.body, "# X\n\n");
}

#[test]
fn internal_blank_runs_survive_cleanup() {
    let segments = [
        RawSegment::caption("one."),
        RawSegment::caption(""),
        RawSegment::caption(""),
        RawSegment::caption("two."),
    ];
    let result = reconstruct_transcript(&segments, "X");
    assert_eq!(result.body, "# X\n\none.\n\n\n\n\n\ntwo.");
}

#[test]
fn retry_prompt_after_sentence_is_removed() {
    let segments = [RawSegment::caption("that is all."), RawSegment::caption(RETRY)];
    let result = reconstruct_transcript(&segments, "T");
    assert_eq!(result.body, "# T\n\nthat is all.");
}

#[test]
fn retry_prompt_mid_sentence_is_removed() {
    let segments = [RawSegment::caption("and so"), RawSegment::caption(RETRY)];
    let result = reconstruct_transcript(&segments, "T");
    assert_eq!(result.body, "# T\n\nAnd so");
}

#[test]
fn terminal_captions_keep_original_casing() {
    let captions = ["The API is DOWN.", "wHy?", "GO!"];
    let segments: Vec<RawSegment> = captions.iter().map(|c| RawSegment::caption(*c)).collect();
    let result = reconstruct_transcript(&segments, "T");
    for caption in captions {
        assert!(result.body.contains(caption), "missing {caption:?}");
    }
}

#[test]
fn non_terminal_run_has_one_capital() {
    let segments = [
        RawSegment::caption("today We"),
        RawSegment::caption("Look At"),
        RawSegment::caption("Ownership"),
    ];
    let result = reconstruct_transcript(&segments, "T");
    assert_eq!(result.body, "# T\n\nToday we  look at  ownership");
}

#[test]
fn segments_without_content_are_ignored() {
    let segments = [
        RawSegment::empty(),
        RawSegment::caption("hi."),
        RawSegment::empty(),
    ];
    let classified = classify_all(&segments, 3);
    assert_eq!(classified[0], ClassifiedSegment::Skip);
    assert_eq!(classified[2], ClassifiedSegment::Skip);
    assert_eq!(reconstruct_transcript(&segments, "T").body, "# T\n\nhi.");
}

#[test]
fn every_call_starts_from_fresh_state() {
    let first = [RawSegment::caption("no period")];
    let second = [RawSegment::caption("again")];
    assert_eq!(reconstruct_transcript(&first, "A").body, "# A\n\nNo period");
    assert_eq!(reconstruct_transcript(&second, "B").body, "# B\n\nAgain");
}
