mod sequencer_tests;
mod surface_tests;
