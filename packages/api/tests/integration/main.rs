mod contact_tests;
