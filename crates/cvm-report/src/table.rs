//! Fixed-precision console tables. Column sets, precisions and spacing
//! follow the published layout so output can be diffed against it.

use cvm_core::{Field, Sweep};

/// One table column: which array, how many decimals, and the leading
/// padding before the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: Field,
    pub precision: usize,
    pub pad: usize,
}

const fn column(field: Field, precision: usize, pad: usize) -> Column {
    Column {
        field,
        precision,
        pad,
    }
}

pub const ENTROPY_COLUMNS: [Column; 7] = [
    column(Field::X, 2, 3),
    column(Field::NegX, 2, 4),
    column(Field::NegY, 2, 5),
    column(Field::NegZ, 2, 5),
    column(Field::NegYW, 2, 6),
    column(Field::NegXZ, 2, 6),
    column(Field::NegTot, 4, 6),
];

pub const ISING_COLUMNS: [Column; 5] = [
    column(Field::X, 2, 3),
    column(Field::NegX, 4, 4),
    column(Field::ActivationEnthalpy, 4, 5),
    column(Field::InteractionEnthalpy, 4, 7),
    column(Field::FreeEnergy, 4, 7),
];

const ENTROPY_HEADER: &str =
    "    x   negXEntropy negYEntropy negZEntropy negYWEntropy negXZEntropy negTotEnt";
const ISING_HEADER: &str = "    x   Entropy  activEnthalpy  interactEnthalpy   freeEnergy";

/// Entropy terms alongside x, for the case without interaction enthalpy.
pub fn entropy_table(sweep: &Sweep) -> String {
    render(
        sweep,
        " Equilibrium results, where the interaction enthalpy = 0;",
        ENTROPY_HEADER,
        &ENTROPY_COLUMNS,
    )
}

/// Entropy, both enthalpies and the free energy of the simple Ising model.
pub fn ising_table(sweep: &Sweep) -> String {
    render(sweep, " The Simple Ising model;", ISING_HEADER, &ISING_COLUMNS)
}

fn render(sweep: &Sweep, title: &str, header: &str, columns: &[Column]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(title);
    out.push_str("\n\n");
    out.push_str(header);
    out.push_str("\n\n");
    for row in sweep.rows() {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| {
                format!(
                    "{:pad$}{:.prec$}",
                    "",
                    row.get(c.field),
                    pad = c.pad,
                    prec = c.precision
                )
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
