pub mod heapsort;
