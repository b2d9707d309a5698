pub mod bitvec;

pub use bitvec::BitVec;
