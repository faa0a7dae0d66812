pub mod rust_shellsort_knuth;
pub mod rust_shellsort_sedgewick;
pub mod rust_shellsort_shell;
pub mod rust_std;
