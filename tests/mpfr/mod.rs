mod common;
mod compare_const_test;
mod compare_ops_test;
