//! Build a small grid, inspect a neighborhood and overwrite a cell

use linkmat::{print_matrix, write_neighbors, GridMatrix, LinkedMatrix};

fn main() {
    let mut matrix: LinkedMatrix<i32> = LinkedMatrix::new(4, 5).expect("valid dimensions");

    println!("Fresh 4x5 matrix (coordinate fill):");
    print_matrix(&matrix).expect("stdout");

    matrix.insert(2, 2, 42).expect("in bounds");
    println!("\nAfter inserting 42 at (2,2):");
    print_matrix(&matrix).expect("stdout");

    println!("\nNeighborhood of (2,2):");
    let neighbors = matrix.neighbors(2, 2).expect("in bounds");
    write_neighbors(&neighbors, &mut std::io::stdout()).expect("stdout");

    let (rows, cols) = matrix.dimensions();
    println!("\n{rows}x{cols} grid, {} nodes", matrix.node_count());
}
