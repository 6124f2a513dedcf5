use std::collections::VecDeque;

use rand::Rng;
use crate::quiz_engine::models::{Question, MAX_SECOND_OPERAND};

/// Uniform integer generator over a closed range `[lo, hi]`.
///
/// Sessions draw every operand through this trait so callers can swap the
/// entropy-backed source for a seeded or scripted one.
pub trait OperandSource {
    /// Return a value in `lo..=hi`. Callers always pass `lo <= hi`.
    fn draw(&mut self, lo: u32, hi: u32) -> u32;
}

/// Adapts any `rand` generator into an [`OperandSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl<R: Rng> OperandSource for RngSource<R> {
    fn draw(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed list of draws, clamped into the requested range.
///
/// Once the list runs out every draw returns `lo`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: VecDeque<u32>,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        SequenceSource { values: values.into_iter().collect() }
    }

    /// Draws still queued.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl OperandSource for SequenceSource {
    fn draw(&mut self, lo: u32, hi: u32) -> u32 {
        self.values.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }
}

impl<S: OperandSource + ?Sized> OperandSource for &mut S {
    fn draw(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).draw(lo, hi)
    }
}

/// Draw one question for `table`: first operand from `1..=table`, second from
/// `1..=12`, in that order. Draws are independent, so repeats are possible.
///
/// Values a source returns outside the requested range are clamped back into
/// it, which keeps the product at most 144.
pub fn draw_question<S: OperandSource + ?Sized>(source: &mut S, table: u32) -> Question {
    let first = source.draw(1, table).clamp(1, table);
    let second = source.draw(1, MAX_SECOND_OPERAND).clamp(1, MAX_SECOND_OPERAND);
    Question { first, second }
}
