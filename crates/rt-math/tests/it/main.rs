mod coerce;
