//! Benchmarks for color span resolution and `.gtxt` encoding
//!
//! Run with: cargo bench spans

use tintpad::color::Color;
use tintpad::format::{self, FileFormat};
use tintpad::model::{ColorSpan, Document, SpanList, TextRange};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str = "The quick brown fox jumps over the lazy dog.\n";

fn palette(i: usize) -> Color {
    Color::rgb((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8)
}

/// Overlapping spans, one starting every 10 characters
fn span_list(text_len: usize) -> SpanList {
    let mut spans = SpanList::new();
    for (i, start) in (0..text_len).step_by(10).enumerate() {
        spans.push(ColorSpan::new(start, (start + 25).min(text_len), palette(i)));
    }
    spans
}

fn colored_document(line_count: usize) -> Document {
    let mut doc = Document::with_text(&LINE.repeat(line_count));
    let len = doc.len_chars();
    for (i, start) in (0..len).step_by(10).enumerate() {
        let range = TextRange::new(
            doc.offset_to_pos(start),
            doc.offset_to_pos((start + 25).min(len)),
        );
        doc.apply_color(range, palette(i));
    }
    doc
}

// ============================================================================
// Span resolution
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn styled_runs(bencher: divan::Bencher, line_count: usize) {
    let text_len = LINE.len() * line_count;
    let spans = span_list(text_len);
    bencher.bench(|| divan::black_box(spans.styled_runs(text_len)));
}

#[divan::bench(args = [100, 1_000])]
fn color_at_every_offset(bencher: divan::Bencher, line_count: usize) {
    let text_len = LINE.len() * line_count;
    let spans = span_list(text_len);
    bencher.bench(|| {
        let colored = (0..text_len)
            .filter(|&offset| spans.color_at(offset).is_some())
            .count();
        divan::black_box(colored)
    });
}

#[divan::bench(args = [100, 1_000])]
fn clear_middle_range(bencher: divan::Bencher, line_count: usize) {
    let text_len = LINE.len() * line_count;
    let spans = span_list(text_len);
    bencher
        .with_inputs(|| spans.clone())
        .bench_values(|mut spans| {
            spans.clear_range(text_len / 4..text_len * 3 / 4);
            spans
        });
}

#[divan::bench(args = [100, 1_000])]
fn shift_for_insert_at_start(bencher: divan::Bencher, line_count: usize) {
    let spans = span_list(LINE.len() * line_count);
    bencher
        .with_inputs(|| spans.clone())
        .bench_values(|mut spans| {
            spans.shift_for_insert(0, 1);
            spans
        });
}

// ============================================================================
// Encoding
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn encode_gtxt(bencher: divan::Bencher, line_count: usize) {
    let doc = colored_document(line_count);
    bencher.bench(|| divan::black_box(format::encode(&doc, FileFormat::Gtxt).is_ok()));
}

#[divan::bench(args = [100, 1_000])]
fn decode_gtxt(bencher: divan::Bencher, line_count: usize) {
    let content = format::encode(&colored_document(line_count), FileFormat::Gtxt)
        .expect("encode should succeed");
    bencher.bench(|| {
        let mut doc = Document::new();
        let result = format::decode_into(&mut doc, &content, FileFormat::Gtxt, Color::WHITE);
        divan::black_box((result.is_ok(), doc.span_count()))
    });
}
