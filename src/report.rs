//! Observational reporting.
//!
//! The engine hands read-only snapshots to a [`Reporter`] at generation 0,
//! every `report_interval` generations, and once at the end. Reporters
//! cannot influence the run.

use crate::sga::{Individual, Population};
use std::io::Write;

/// State of the population after a reported generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSnapshot<'a> {
    /// Generation number; `0` is the initial population.
    pub generation: usize,
    /// Fittest individual of `population`.
    pub best: &'a Individual,
    /// Selection record that produced `population` (empty at generation 0).
    pub selected: &'a [usize],
    pub population: &'a Population,
}

/// Best-ever individual at the end of a run.
#[derive(Debug, Clone, Copy)]
pub struct FinalReport<'a> {
    pub generations: usize,
    pub best: &'a Individual,
}

/// Receives run snapshots.
pub trait Reporter {
    fn on_generation(&mut self, _snapshot: &GenerationSnapshot<'_>) {}

    fn on_finish(&mut self, _report: &FinalReport<'_>) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_generation(&mut self, snapshot: &GenerationSnapshot<'_>) {
        (**self).on_generation(snapshot);
    }

    fn on_finish(&mut self, report: &FinalReport<'_>) {
        (**self).on_finish(report);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Forwards snapshots to the `log` facade at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_generation(&mut self, snapshot: &GenerationSnapshot<'_>) {
        let (x, y) = snapshot.best.point();
        log::info!(
            "generation {}: best {} value {:.4},{:.4} fitness {:.4} (mean {:.4})",
            snapshot.generation,
            snapshot.best.chromosome(),
            x,
            y,
            snapshot.best.fitness(),
            snapshot.population.mean_fitness()
        );
    }

    fn on_finish(&mut self, report: &FinalReport<'_>) {
        let (x, y) = report.best.point();
        log::info!(
            "best over {} generations: {} value {:.4},{:.4} fitness {:.4}",
            report.generations,
            report.best.chromosome(),
            x,
            y,
            report.best.fitness()
        );
    }
}

/// Plain-text tables on any writer, four decimals throughout.
///
/// Write failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_generation(&mut self, s: &GenerationSnapshot<'_>) -> std::io::Result<()> {
        let (bx, by) = s.best.point();
        writeln!(self.out)?;
        writeln!(
            self.out,
            "   Best string: {} value: {:.4},{:.4} fitness: {:.4}",
            s.best.chromosome(),
            bx,
            by,
            s.best.fitness()
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "GENERATION: {}", s.generation)?;
        write!(self.out, "Selected Strings: ")?;
        for idx in s.selected {
            write!(self.out, "{idx} ")?;
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        write!(self.out, "\tX\tY\tf(x)\t\tstr")?;
        for ind in s.population {
            let (x, y) = ind.point();
            write!(
                self.out,
                "\n   {:.4}\t{:.4}\t{:.4}\t{}",
                x,
                y,
                ind.fitness(),
                ind.chromosome()
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_final(&mut self, r: &FinalReport<'_>) -> std::io::Result<()> {
        let (x, y) = r.best.point();
        writeln!(self.out, "{}", "=".repeat(55))?;
        writeln!(self.out, "Best result over all generations:")?;
        writeln!(self.out, "{}", r.best.chromosome())?;
        writeln!(
            self.out,
            "Decoded value = {:.4},{:.4}  Fitness = {:.4}",
            x,
            y,
            r.best.fitness()
        )?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_generation(&mut self, snapshot: &GenerationSnapshot<'_>) {
        if let Err(e) = self.write_generation(snapshot) {
            log::warn!("failed to write generation report: {e}");
        }
    }

    fn on_finish(&mut self, report: &FinalReport<'_>) {
        if let Err(e) = self.write_final(report) {
            log::warn!("failed to write final report: {e}");
        }
    }
}
