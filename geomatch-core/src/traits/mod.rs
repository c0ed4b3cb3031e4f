pub mod criterion;
