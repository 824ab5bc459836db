mod yield_scenarios;
