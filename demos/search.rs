use nalgebra::DVector;
use nearest_neighbor::{KdTree, KdTreeError};

fn main() -> Result<(), KdTreeError> {
    let raw_data: [[f64; 2]; 25] = [
        [2., 2.],   // 0
        [3., 7.],   // 1
        [3., 13.],  // 2
        [3., 18.],  // 3
        [5., 10.],  // 4
        [6., 15.],  // 5
        [7., 6.],   // 6
        [8., 3.],   // 7
        [8., 18.],  // 8
        [10., 8.],  // 9
        [10., 11.], // 10
        [10., 14.], // 11
        [11., 4.],  // 12
        [11., 6.],  // 13
        [13., 1.],  // 14
        [13., 10.], // 15
        [13., 16.], // 16
        [14., 7.],  // 17
        [14., 19.], // 18
        [15., 4.],  // 19
        [15., 12.], // 20
        [17., 17.], // 21
        [18., 5.],  // 22
        [18., 8.],  // 23
        [18., 10.], // 24
    ];

    let vecs = raw_data
        .iter()
        .map(|s| DVector::from_row_slice(s))
        .collect::<Vec<DVector<f64>>>();
    let labels = (0..vecs.len())
        .map(|i| format!("point {}", i))
        .collect::<Vec<String>>();

    let tree = KdTree::new(2)?.build(vecs, labels)?;
    tree.print();

    let query = DVector::from_row_slice(&[10., 15.]);
    assert_eq!(tree.query(&query)?.map(String::as_str), Some("point 11"));
    assert_eq!(tree.nearest(&query)?, Some((11, 1.)));
    Ok(())
}
