mod broken;
mod interpret;
mod samples;
