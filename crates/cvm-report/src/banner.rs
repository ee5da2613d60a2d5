const RULE: &str = " ******************************************************************************";

/// Introductory text printed ahead of the tables.
pub fn banner() -> String {
    let lines = [
        "",
        RULE,
        "",
        " 2-D Cluster Variation Method",
        "   Equilibrium (analytic) calculations",
        " Negative entropies are computed for the case without interaction",
        "  enthalpy, so every configuration variable is fixed by probability alone.",
        "",
        "   In these calculations x1 = A (units at value 1)",
        "                     and x2 = B (units at value 0).",
        "",
        RULE,
        "",
    ];
    lines.join("\n")
}
