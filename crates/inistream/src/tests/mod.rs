mod document_ops;
