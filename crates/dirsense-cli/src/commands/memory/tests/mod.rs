mod tests_write;
