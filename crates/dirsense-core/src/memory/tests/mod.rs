mod tests_model;
