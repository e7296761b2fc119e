mod cell;
mod element;
mod pointers;
mod touched;
