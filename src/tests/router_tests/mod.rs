mod document_tests;
mod flow_tests;
mod home_tests;
