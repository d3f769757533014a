mod connectivity;
