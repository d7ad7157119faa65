mod iter;
