//! Output generation for the molar CLI application

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};
use tracing::debug;

use crate::analysis::Analysis;
use crate::rendering::{highlight, Render, Syntax};

static TEMPLATE: &str = "{formula}\n{mass} {unit}";

#[derive(Serialize)]
struct Context {
    formula: String,
    mass: String,
    unit: String,
}

/// Describe an analysis the way the command line tool prints it: the
/// canonical formula on one line and the molar mass on the next. Unless
/// `plain` is set the formula is written with subscript digits.
pub fn report(
    analysis: &Analysis,
    renderer: &dyn Render,
    plain: bool,
) -> Result<String, tinytemplate::error::Error> {
    let formula = if plain {
        analysis
            .canonical
            .clone()
    } else {
        analysis.pretty()
    };

    let context = Context {
        formula: highlight(renderer, &formula),
        mass: renderer.style(Syntax::Mass, &format!("{:.6}", analysis.mass)),
        unit: renderer.style(Syntax::Unit, "g/mol"),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("report", TEMPLATE)?;

    let rendered = tt.render("report", &context)?;
    debug!(?rendered);

    Ok(rendered)
}
