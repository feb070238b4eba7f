//! Differentiates a single tanh neuron and prints its graph in Graphviz format.
//!
//! `cargo run --example neuron_graph | dot -Tsvg > neuron.svg`

use scalargrad_core::autograd::trace_graph;
use scalargrad_core::Tape;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tape = Tape::new();
    let x1 = tape.named_leaf("x1", 2.0);
    let x2 = tape.named_leaf("x2", 0.0);
    let w1 = tape.named_leaf("w1", -3.0);
    let w2 = tape.named_leaf("w2", 1.0);
    let b = tape.named_leaf("b", 6.8813735870195432);

    let x1w1 = (x1 * w1).with_label("x1*w1");
    let x2w2 = (x2 * w2).with_label("x2*w2");
    let n = (x1w1 + x2w2 + b).with_label("n");
    let o = n.tanh().with_label("o");
    o.backward()?;

    for leaf in [x1, x2, w1, w2, b] {
        eprintln!(
            "{:>2}: value {:>9.6}  grad {:>9.6}",
            leaf.label().unwrap_or_default(),
            leaf.value(),
            leaf.grad()
        );
    }

    let trace = trace_graph(&o)?;
    let stdout = io::stdout();
    trace.write_dot(&tape, &mut stdout.lock())?;
    Ok(())
}

