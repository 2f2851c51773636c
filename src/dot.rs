//! Renders a decision tree in the Graphviz dot language, in the layout of the
//! graph that the training script writes next to the model.

use crate::model::{CLASS_NAMES, FEATURE_NAMES};
use crate::tree::{DecisionTree, Node};
use crate::utils::find_max;
use std::fmt::{self, Write};

/// Render 'tree' as a dot digraph. Thresholds are printed with 'precision'
/// digits after the decimal point.
pub fn export(tree: &DecisionTree, precision: usize) -> String {
    let mut out = String::new();
    // Writing into a String can't fail.
    let _ = write_tree(&mut out, tree, precision);
    out
}

/// Write the dot description of 'tree' into 'out'.
pub fn write_tree<W: Write>(
    out: &mut W,
    tree: &DecisionTree,
    precision: usize,
) -> fmt::Result {
    writeln!(out, "digraph Tree {{")?;
    writeln!(out, "node [shape=box] ;")?;

    for (idx, node) in tree.nodes().iter().enumerate() {
        let votes = tree.node_votes(idx).unwrap_or_default();
        let samples: u32 = votes.iter().sum();

        write!(out, "{} [label=\"", idx)?;
        if let Node::Split {
            feature, threshold, ..
        } = node
        {
            write!(
                out,
                "{} <= {:.*}\\n",
                FEATURE_NAMES[*feature], precision, threshold
            )?;
        }
        writeln!(
            out,
            "samples = {}\\nvalue = [{}, {}, {}]\\nclass = {}\"] ;",
            samples,
            votes[0],
            votes[1],
            votes[2],
            CLASS_NAMES[find_max(&votes)]
        )?;

        if let Node::Split { left, right, .. } = node {
            if idx == 0 {
                writeln!(
                    out,
                    "{} -> {} [labeldistance=2.5, labelangle=45, headlabel=\"True\"] ;",
                    idx, left
                )?;
                writeln!(
                    out,
                    "{} -> {} [labeldistance=2.5, labelangle=-45, headlabel=\"False\"] ;",
                    idx, right
                )?;
            } else {
                writeln!(out, "{} -> {} ;", idx, left)?;
                writeln!(out, "{} -> {} ;", idx, right)?;
            }
        }
    }

    writeln!(out, "}}")
}
