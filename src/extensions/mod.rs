pub mod annotations;

pub use annotations::{Annotation, AnnotationShape, AnnotationStyle, Color, DashStyle};
