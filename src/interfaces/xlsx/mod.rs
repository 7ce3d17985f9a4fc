pub mod sales_reader;
