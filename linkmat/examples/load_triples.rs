//! Load a matrix from a producer's triple records and search it

use linkmat::loader::{from_triples, triples_from_json};
use linkmat::{print_matrix, LinkedMatrix, Triple};

fn main() {
    // Records as they would arrive from a loader: a JSON list of
    // (row, col, value) triples.
    let records = r#"[
        {"row": 0, "col": 0, "value": 100},
        {"row": 1, "col": 1, "value": 200},
        {"row": 2, "col": 2, "value": 300}
    ]"#;

    let triples: Vec<Triple<i32>> = triples_from_json(records).expect("well-formed records");
    let matrix: LinkedMatrix<i32> = from_triples(3, 3, triples).expect("records fit the grid");

    println!("Loaded matrix:");
    print_matrix(&matrix).expect("stdout");

    match matrix.get_by_value(200) {
        Some(node) => println!("\nFound 200 at {:?}", node.position()),
        None => println!("\n200 is not in the grid"),
    }

    match matrix.get_by_value(999) {
        Some(node) => println!("Found 999 at {:?}", node.position()),
        None => println!("999 is not in the grid"),
    }
}
