use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Right-hand side of a linear system: one column or several.
#[derive(Debug, Clone, Copy)]
pub enum Bias<'a> {
    Vector(ArrayView1<'a, f64>),
    Matrix(ArrayView2<'a, f64>),
}

impl<'a> Bias<'a> {
    /// Returns the number of rows (equations) the bias covers.
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Bias::Vector(vector) => vector.len(),
            Bias::Matrix(matrix) => matrix.nrows(),
        }
    }

    /// Views the bias as a matrix, turning a vector into a single column.
    #[must_use]
    pub fn into_columns(self) -> ArrayView2<'a, f64> {
        match self {
            Bias::Vector(vector) => vector.insert_axis(Axis(1)),
            Bias::Matrix(matrix) => matrix,
        }
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Bias<'a> {
    fn from(vector: ArrayView1<'a, f64>) -> Self {
        Bias::Vector(vector)
    }
}

impl<'a> From<ArrayView2<'a, f64>> for Bias<'a> {
    fn from(matrix: ArrayView2<'a, f64>) -> Self {
        Bias::Matrix(matrix)
    }
}

impl<'a> From<&'a Array1<f64>> for Bias<'a> {
    fn from(vector: &'a Array1<f64>) -> Self {
        Bias::Vector(vector.view())
    }
}

impl<'a> From<&'a Array2<f64>> for Bias<'a> {
    fn from(matrix: &'a Array2<f64>) -> Self {
        Bias::Matrix(matrix.view())
    }
}
