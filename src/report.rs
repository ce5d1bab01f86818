//! Plain-text population listings.
//!
//! Writes the initial population (genes only) and the final population
//! (genes followed by `Resultado = <weighted sum>`), one chromosome per line.

use crate::error::Result;
use crate::ga::{Chromosome, EvolutionResult, Population};
use std::io::Write;

/// Writes the initial-population banner and listing.
pub fn write_initial<W: Write>(out: &mut W, population: &Population) -> Result<()> {
    writeln!(out, "----Población Inicial----")?;
    write_population(out, population)
}

/// Writes `Cromosomas:` followed by one line of space-separated genes per
/// chromosome.
pub fn write_population<W: Write>(out: &mut W, population: &Population) -> Result<()> {
    writeln!(out, "Cromosomas:")?;
    for chromosome in population {
        write_genes(out, chromosome)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the final population, each line ending in its weighted sum.
pub fn write_final<W: Write>(out: &mut W, result: &EvolutionResult) -> Result<()> {
    writeln!(
        out,
        "Cromosomas finales después de {} generaciones:",
        result.generations
    )?;
    for (chromosome, sum) in result.population.iter().zip(&result.weighted_sums) {
        write_genes(out, chromosome)?;
        writeln!(out, "Resultado = {sum}")?;
    }
    Ok(())
}

fn write_genes<W: Write>(out: &mut W, chromosome: &Chromosome) -> Result<()> {
    for gene in chromosome.genes() {
        write!(out, "{gene} ")?;
    }
    Ok(())
}
