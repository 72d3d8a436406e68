//! Graphviz export for eyeballing layouts while hacking on the lane logic. Debug tooling
//! only - renderers should consume [`Layout`] geometry directly, not dot output.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::layout::Layout;

impl Layout {
    pub fn to_dot_graph(&self) -> String {
        // Edges hold positions, not ids. y is unique per row, so it keys the lookup.
        let id_at_y: HashMap<usize, &str> = self.nodes.iter()
            .map(|n| (n.pos.y, n.id.as_str()))
            .collect();

        let mut out = String::new();
        out.push_str("digraph {\n");
        out.push_str("\trankdir=\"BT\"\n");
        out.push_str("\tnode [shape=box style=filled]\n");

        for node in &self.nodes {
            write!(&mut out, "\t\"{}\" [fillcolor=\"{}\" label=<{} (lane {})>]\n",
                   node.id, crate::colors::color_for_lane(node.lane), node.id, node.lane).unwrap();
        }
        for edge in &self.edges {
            let from = id_at_y[&edge.from.y];
            let to = id_at_y[&edge.to.y];
            write!(&mut out, "\t\"{from}\" -> \"{to}\" [color=\"{}\"]\n", edge.color).unwrap();
        }

        out.push_str("}\n");
        out
    }

    pub fn generate_dot_svg(&self, out_filename: &Path) {
        render_dot_string(self.to_dot_graph(), out_filename);
    }
}

// This is for debugging.
pub(crate) fn render_dot_string(dot_content: String, out_filename: &Path) {
    let out_file = File::create(out_filename).expect("Could not create output file");
    let dot_path = "dot";
    let mut child = Command::new(dot_path)
        .arg("-Tsvg")
        .stdin(Stdio::piped())
        .stdout(out_file)
        .stderr(Stdio::piped())
        .spawn()
        .expect("Could not run dot");

    let mut stdin = child.stdin.take().unwrap();
    // Spawn is needed here to prevent a potential deadlock. See:
    // https://doc.rust-lang.org/std/process/index.html#handling-io
    std::thread::spawn(move || {
        stdin.write_all(dot_content.as_bytes()).unwrap();
    });

    let out = child.wait_with_output().unwrap();

    // Pipe stderr.
    std::io::stderr().write_all(&out.stderr).unwrap();

    println!("Wrote DOT output to {}", out_filename.display());
}
