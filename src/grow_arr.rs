mod array;
mod inner;

pub use array::GrowArr;
