pub mod results_writer;
