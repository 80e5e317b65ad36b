pub mod two_way_insertion;
