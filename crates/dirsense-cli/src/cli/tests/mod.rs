mod tests_settings;
