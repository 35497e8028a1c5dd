pub mod buyers;
