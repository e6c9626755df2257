//! Per-type display collections for finished shapes.

use super::shape::{Shape, ShapeBucket};

/// Position of a committed shape: its bucket and index within that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeId {
    pub bucket: ShapeBucket,
    pub index: usize,
}

/// Five append-only collections, one per display bucket.
///
/// Insertion order within a bucket is the z-order. The composite view
/// concatenates the buckets in [`ShapeBucket::ALL`] order, so every ellipse
/// draws above every rectangle regardless of creation time.
#[derive(Debug, Clone, Default)]
pub struct DisplayCollections {
    lines: Vec<Shape>,
    rectangles: Vec<Shape>,
    ellipses: Vec<Shape>,
    polygons: Vec<Shape>,
    polylines: Vec<Shape>,
}

impl DisplayCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape to the bucket matching its geometry.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let bucket = shape.bucket();
        let shapes = self.bucket_mut(bucket);
        shapes.push(shape);
        ShapeId {
            bucket,
            index: shapes.len() - 1,
        }
    }

    /// Shapes in one bucket, in insertion order.
    pub fn bucket(&self, bucket: ShapeBucket) -> &[Shape] {
        match bucket {
            ShapeBucket::Lines => &self.lines,
            ShapeBucket::Rectangles => &self.rectangles,
            ShapeBucket::Ellipses => &self.ellipses,
            ShapeBucket::Polygons => &self.polygons,
            ShapeBucket::Polylines => &self.polylines,
        }
    }

    fn bucket_mut(&mut self, bucket: ShapeBucket) -> &mut Vec<Shape> {
        match bucket {
            ShapeBucket::Lines => &mut self.lines,
            ShapeBucket::Rectangles => &mut self.rectangles,
            ShapeBucket::Ellipses => &mut self.ellipses,
            ShapeBucket::Polygons => &mut self.polygons,
            ShapeBucket::Polylines => &mut self.polylines,
        }
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.bucket(id.bucket).get(id.index)
    }

    /// Iterates every shape in compositing order (bottom layer first).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        ShapeBucket::ALL
            .into_iter()
            .flat_map(move |bucket| self.bucket(bucket).iter())
    }

    /// Total number of shapes across all buckets.
    pub fn len(&self) -> usize {
        ShapeBucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape count per bucket, in compositing order.
    pub fn counts(&self) -> [(ShapeBucket, usize); 5] {
        ShapeBucket::ALL.map(|bucket| (bucket, self.bucket(bucket).len()))
    }
}
