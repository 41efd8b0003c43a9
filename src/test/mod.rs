mod test_history;
