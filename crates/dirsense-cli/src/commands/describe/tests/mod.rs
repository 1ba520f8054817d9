mod tests_execute;
